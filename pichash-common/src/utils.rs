pub mod imgutils;
