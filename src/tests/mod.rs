mod class_body;
mod config;
mod scenarios;
mod util;
