pub(crate) mod email_settings;
