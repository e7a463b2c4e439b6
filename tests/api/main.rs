mod admin;
mod booking;
mod helpers;
