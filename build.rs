fn main() {
    // Export the ESP-IDF link environment only when building for the chip.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
