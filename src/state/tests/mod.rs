mod common;
mod edit;
