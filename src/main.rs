//! Quiz Page UI Entry Point

fn main() {
    quiz_page_ui::start();
}
