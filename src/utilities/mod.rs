pub mod extract_id_from_url;
pub mod generate_random_delay;
pub mod parse_tiktok_time;
pub mod write_records;
