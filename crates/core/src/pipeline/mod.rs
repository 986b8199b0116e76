pub mod analyze_file_use_case;
pub mod compare_files_use_case;
