mod error_codes;
