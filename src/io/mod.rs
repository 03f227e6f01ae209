pub mod activity_csv;
