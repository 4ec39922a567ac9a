pub mod db;
mod errors;
pub mod movie {
    pub mod entity;
    pub mod repository;
}
pub mod review {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
