fn main() {
    #[cfg(feature = "csr")]
    taskboard::start();
}
