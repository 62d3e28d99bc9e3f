pub struct Args {
    pub image: String,
}
