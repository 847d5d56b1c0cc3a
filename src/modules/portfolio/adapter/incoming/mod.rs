pub mod text_page;
