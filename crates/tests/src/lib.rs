#[cfg(test)]
mod common;

#[cfg(test)]
mod list_tests;

#[cfg(test)]
mod record_tests;

#[cfg(test)]
mod controller_tests;
