mod response_kind;
