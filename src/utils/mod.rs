pub mod short_url;
