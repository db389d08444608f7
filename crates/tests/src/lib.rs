#[cfg(test)]
mod common;

#[cfg(test)]
mod envelope_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod branch_workflow_tests;

#[cfg(test)]
mod client_workflow_tests;

#[cfg(test)]
mod case_workflow_tests;
