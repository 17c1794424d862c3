use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tetroclock::app::run()
}
