pub mod segment_progress_bar;
