fn main() {
    wilderness_watcher::run();
}
