fn main() {
    twinsim::run();
}
