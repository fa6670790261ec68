pub mod advanced_results;
