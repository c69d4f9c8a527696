use sea_orm::EnumIter;
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(crate) enum Member {
    Table,
    UserId,
    UserName,
    Email,
    Active,
    CountryCode,
    HasAvatar,
    GameId,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Tour {
    Table,
    TourId,
    Name,
    StartDate,
    EndDate,
    TeamTour,
    Active,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum TourMember {
    Table,
    Id,
    TourId,
    UserId,
    UserName,
    HcpIndex,
    CustomHcp,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum TourStanding {
    Table,
    Id,
    TourId,
    UserName,
    Side,
    CountryCode,
    HasAvatar,
    Hcp,
    Events,
    Wins,
    Top5,
    Top10,
    Points,
    Position,
    UpdatedAt,
}

#[derive(Iden, EnumIter)]
pub(crate) enum StandingSide {
    Table,
    #[iden = "gross"]
    Gross,
    #[iden = "net"]
    Net,
}

#[derive(DeriveIden)]
pub(crate) enum Tournament {
    Table,
    TournamentId,
    TourId,
    Name,
    CourseName,
    Status,
    StartDate,
    EndDate,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Scorecard {
    Table,
    Id,
    TournamentId,
    PlayerId,
    PlayerName,
    HcpIndex,
    Round,
    CourseName,
    Teetype,
    Rating,
    Slope,
    TotalGross,
    TotalNet,
    ToParGross,
    ToParNet,
    InGross,
    OutGross,
    InNet,
    OutNet,
    HoleData,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum SyncLog {
    Table,
    Id,
    SyncType,
    Status,
    StartedAt,
    CompletedAt,
    RecordsSynced,
    ErrorMessage,
}

#[derive(Iden, EnumIter)]
pub(crate) enum SyncStatus {
    Table,
    #[iden = "running"]
    Running,
    #[iden = "completed"]
    Completed,
    #[iden = "failed"]
    Failed,
}
