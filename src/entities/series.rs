use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub series_id: i64,
    pub series_semester: Option<String>,
    pub series_year: Option<i64>,
    pub series_title: Option<String>,
    pub series_brief: Option<String>,
    pub series_poster: Option<String>,
    pub series_poster_url: Option<String>,
    pub series_display: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
