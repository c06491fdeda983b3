mod captcha_test;
mod store_test;
