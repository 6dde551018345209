#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod listing_tests;

#[cfg(test)]
mod claim_tests;

#[cfg(test)]
mod analytics_tests;

#[cfg(test)]
mod profile_tests;

#[cfg(test)]
mod error_tests;
