mod copies;
mod search;
