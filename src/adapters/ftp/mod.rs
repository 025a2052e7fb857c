//! FTP distribution adapter

pub mod transfer;

pub use transfer::FtpTransfer;
