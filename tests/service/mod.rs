mod auth;
mod billing;
mod hotel;
mod privacy;
mod ticket;
mod unauthorized;
mod user;
