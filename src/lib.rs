pub mod birthday;
pub mod countdown;
pub mod export;
pub mod logging;
pub mod notifier;
pub mod paths;
pub mod quotes;
pub mod reminder;
pub mod store;
