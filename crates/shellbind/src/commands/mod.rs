pub mod init;

#[cfg(windows)]
pub mod browse;
#[cfg(windows)]
pub mod drop;
#[cfg(windows)]
pub mod icon;
#[cfg(windows)]
pub mod notify;
#[cfg(windows)]
pub mod open;
