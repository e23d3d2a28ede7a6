#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod register_tests;

#[cfg(test)]
mod profile_update_tests;

#[cfg(test)]
mod restore_tests;

#[cfg(test)]
mod storage_failure_tests;

#[cfg(test)]
mod activity_tests;

#[cfg(test)]
mod navigation_tests;
