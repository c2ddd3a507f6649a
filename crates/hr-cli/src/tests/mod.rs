mod client;
mod commands;
