mod client;
mod dto;
