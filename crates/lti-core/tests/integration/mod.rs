mod dashboard;
mod history;
mod review;
mod snapshot;
