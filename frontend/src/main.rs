fn main() {
    merchant_portal_frontend::start();
}
