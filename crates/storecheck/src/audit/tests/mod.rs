mod answers;
mod catalog;
mod common;
mod rules;
