pub mod url_navigator;
