use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Store,
    Movies,
    Reviews,
    Cart,
    Orders,
}
