pub mod recent_logins_query;
