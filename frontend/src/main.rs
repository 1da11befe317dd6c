fn main() {
    lostfound_frontend::start();
}
