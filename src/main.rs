use grocery_admin::client::App;

fn main() {
    dioxus::launch(App);
}
