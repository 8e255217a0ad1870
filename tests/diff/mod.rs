mod diff3_conflict_hunk;
mod diff3_names_the_changed_side;
mod diff_identical_files_prints_nothing;
mod diff_marks_missing_trailing_newline;
mod diff_reports_changed_lines;
