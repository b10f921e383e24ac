mod calculator;
mod config;
mod contacts;
mod loan;
