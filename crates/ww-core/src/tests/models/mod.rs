mod account_status;
mod credential;
mod identity;
mod property;
