mod assessments;
mod dashboard;

pub use assessments::AssessmentsView;
pub use dashboard::DashboardView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
