mod dashboard;
mod journal;
mod layout;
mod milestones;
mod modals;
mod progress_bar;
mod records;

pub use dashboard::DashboardTab;
pub use journal::JournalTab;
pub use layout::{Header, LoadingScreen, NoticeBanner, TabNav};
pub use milestones::MilestonesTab;
pub use modals::{ExpenseModal, IncomeModal};
pub use progress_bar::ProgressBar;
pub use records::{ExpensesTab, IncomeTab};
