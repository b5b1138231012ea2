//! Built-in curated player list for the 2025 draft season.
//!
//! Headliners carry hand-assigned tiers; the depth pool is appended after
//! them at the deepest tier. Auction values are PPR dollar estimates against
//! a $200 budget and are not derived from the projection formula.

use super::{CuratedPlayer, DraftBoard};
use crate::{EspnId, Position, Result, Season, Tier};
use crate::Position::{DEF, K, QB, RB, TE, WR};

/// ESPN athlete ids confirmed against the athlete overview endpoint.
const KNOWN_ESPN_IDS: &[(&str, u64)] = &[
    ("Josh Allen", 3128390),
    ("Justin Jefferson", 3139477),
    ("Davante Adams", 16800),
    ("Derrick Henry", 3116385),
    ("Lamar Jackson", 3916387),
    ("Christian McCaffrey", 3128720),
    ("Ja'Marr Chase", 4431750),
    ("CeeDee Lamb", 4040715),
    ("Cooper Kupp", 2976499),
    ("Aaron Rodgers", 8439),
];

const HEADLINERS: &[(&str, Position, &str, f64, u8)] = &[
    ("Ja'Marr Chase", WR, "CIN", 62.0, 1),
    ("Justin Jefferson", WR, "MIN", 60.0, 1),
    ("Bijan Robinson", RB, "ATL", 58.0, 1),
    ("CeeDee Lamb", WR, "DAL", 57.0, 1),
    ("Saquon Barkley", RB, "PHI", 55.0, 1),
    ("Amon-Ra St. Brown", WR, "DET", 54.0, 1),
    ("Jahmyr Gibbs", RB, "DET", 53.0, 1),
    ("Puka Nacua", WR, "LAR", 52.0, 1),
    ("Christian McCaffrey", RB, "SF", 50.0, 1),
    ("Malik Nabers", WR, "NYG", 48.0, 1),
    ("Lamar Jackson", QB, "BAL", 45.0, 1),
    ("Josh Allen", QB, "BUF", 42.0, 1),
    ("Jayden Daniels", QB, "WSH", 40.0, 1),
    ("Joe Burrow", QB, "CIN", 36.0, 1),
    ("De'Von Achane", RB, "MIA", 44.0, 2),
    ("Brian Thomas Jr.", WR, "JAX", 42.0, 2),
    ("Nico Collins", WR, "HOU", 41.0, 2),
    ("Drake London", WR, "ATL", 40.0, 2),
    ("A.J. Brown", WR, "PHI", 39.0, 2),
    ("Derrick Henry", RB, "BAL", 38.0, 2),
    ("Brock Bowers", TE, "LV", 37.0, 2),
    ("Jonathan Taylor", RB, "IND", 35.0, 2),
    ("Bucky Irving", RB, "TB", 34.0, 2),
    ("Davante Adams", WR, "NYJ", 33.0, 2),
    ("Jalen Hurts", QB, "PHI", 32.0, 2),
    ("Ladd McConkey", WR, "LAC", 31.0, 2),
    ("Jaxon Smith-Njigba", WR, "SEA", 30.0, 2),
    ("Tyreek Hill", WR, "MIA", 29.0, 2),
    ("James Cook", RB, "BUF", 28.0, 2),
    ("Patrick Mahomes", QB, "KC", 28.0, 2),
    ("Garrett Wilson", WR, "NYJ", 27.0, 2),
    ("Terry McLaurin", WR, "WSH", 26.0, 2),
    ("Tee Higgins", WR, "CIN", 25.0, 2),
    ("Anthony Richardson", QB, "IND", 25.0, 2),
    ("George Kittle", TE, "SF", 24.0, 2),
    ("Marvin Harrison Jr.", WR, "ARI", 24.0, 2),
    ("Trey McBride", TE, "ARI", 23.0, 2),
    ("Cooper Kupp", WR, "LAR", 23.0, 2),
    ("Mike Evans", WR, "TB", 22.0, 2),
    ("Chris Godwin", WR, "TB", 21.0, 2),
    ("C.J. Stroud", QB, "HOU", 20.0, 2),
    ("DK Metcalf", WR, "SEA", 20.0, 2),
    ("DeVonta Smith", WR, "PHI", 19.0, 2),
    ("Stefon Diggs", WR, "HOU", 18.0, 2),
    ("Zay Flowers", WR, "BAL", 17.0, 2),
    ("Kyren Williams", RB, "LAR", 22.0, 3),
    ("Kenneth Walker III", RB, "SEA", 21.0, 3),
    ("Breece Hall", RB, "NYJ", 20.0, 3),
    ("Josh Jacobs", RB, "GB", 19.0, 3),
    ("Dak Prescott", QB, "DAL", 18.0, 3),
    ("Alvin Kamara", RB, "NO", 18.0, 3),
    ("David Montgomery", RB, "DET", 17.0, 3),
    ("Tua Tagovailoa", QB, "MIA", 16.0, 3),
    ("Joe Mixon", RB, "HOU", 16.0, 3),
    ("DJ Moore", WR, "CHI", 16.0, 3),
    ("Aaron Jones", RB, "MIN", 15.0, 3),
    ("Keenan Allen", WR, "CHI", 15.0, 3),
    ("Kyler Murray", QB, "ARI", 14.0, 3),
    ("Najee Harris", RB, "PIT", 14.0, 3),
    ("George Pickens", WR, "PIT", 14.0, 3),
    ("Mark Andrews", TE, "BAL", 13.0, 3),
    ("Tony Pollard", RB, "TEN", 13.0, 3),
    ("Jordan Addison", WR, "MIN", 13.0, 3),
    ("Caleb Williams", QB, "CHI", 12.0, 3),
    ("Travis Kelce", TE, "KC", 12.0, 3),
    ("Rhamondre Stevenson", RB, "NE", 12.0, 3),
    ("Jayden Reed", WR, "GB", 12.0, 3),
    ("Travis Etienne", RB, "JAX", 11.0, 3),
    ("Rome Odunze", WR, "CHI", 11.0, 3),
    ("Brock Purdy", QB, "SF", 10.0, 3),
    ("Rachaad White", RB, "TB", 10.0, 3),
    ("Calvin Ridley", WR, "TEN", 10.0, 3),
    ("Chuba Hubbard", RB, "CAR", 9.0, 3),
    ("Courtland Sutton", WR, "DEN", 9.0, 3),
    ("Jordan Love", QB, "GB", 8.0, 3),
    ("Sam LaPorta", TE, "DET", 8.0, 3),
    ("Rico Dowdle", RB, "DAL", 8.0, 3),
    ("Jameson Williams", WR, "DET", 8.0, 3),
    ("Evan Engram", TE, "JAX", 6.0, 3),
    ("Kyle Pitts", TE, "ATL", 5.0, 3),
    ("Tank Dell", WR, "HOU", 7.0, 4),
    ("J.K. Dobbins", RB, "LAC", 7.0, 4),
    ("Drake Maye", QB, "NE", 6.0, 4),
    ("Amari Cooper", WR, "BUF", 6.0, 4),
    ("Brian Robinson Jr.", RB, "WSH", 6.0, 4),
    ("Xavier Worthy", WR, "KC", 5.0, 4),
    ("Javonte Williams", RB, "DEN", 5.0, 4),
    ("Trevor Lawrence", QB, "JAX", 4.0, 4),
    ("Dallas Goedert", TE, "PHI", 4.0, 4),
    ("Tyler Lockett", WR, "SEA", 4.0, 4),
    ("Tyjae Spears", RB, "TEN", 4.0, 4),
    ("Aaron Rodgers", QB, "NYJ", 3.0, 4),
    ("Jake Ferguson", TE, "DAL", 3.0, 4),
    ("Diontae Johnson", WR, "HOU", 3.0, 4),
    ("Jaylen Warren", RB, "PIT", 3.0, 4),
    ("David Njoku", TE, "CLE", 2.0, 4),
    ("Dalton Kincaid", TE, "BUF", 2.0, 4),
    ("Jerry Jeudy", WR, "CLE", 2.0, 4),
    ("Isaac Guerendo", RB, "SF", 2.0, 4),
    ("T.J. Hockenson", TE, "MIN", 1.0, 4),
    ("Brandin Cooks", WR, "DAL", 1.0, 4),
    ("DeAndre Hopkins", WR, "KC", 1.0, 4),
    ("Darnell Mooney", WR, "ATL", 1.0, 4),
    ("Adam Thielen", WR, "CAR", 1.0, 4),
    ("Jerome Ford", RB, "CLE", 1.0, 4),
    ("Zamir White", RB, "LV", 1.0, 4),
    ("Ezekiel Elliott", RB, "DAL", 1.0, 4),
    ("Alexander Mattison", RB, "LV", 1.0, 4),
];

const DEPTH_POOL: &[(&str, Position, &str, f64)] = &[
    ("Hollywood Brown", WR, "KC", 1.0),
    ("Wan'Dale Robinson", WR, "NYG", 1.0),
    ("Rashid Shaheed", WR, "NO", 1.0),
    ("Tutu Atwell", WR, "LAR", 1.0),
    ("Jahan Dotson", WR, "PHI", 1.0),
    ("Michael Pittman Jr.", WR, "IND", 2.0),
    ("Josh Downs", WR, "IND", 1.0),
    ("Quentin Johnston", WR, "LAC", 1.0),
    ("Marquez Valdes-Scantling", WR, "BUF", 1.0),
    ("Curtis Samuel", WR, "BUF", 1.0),
    ("Tyler Boyd", WR, "TEN", 1.0),
    ("Jalen Tolbert", WR, "DAL", 1.0),
    ("Elijah Moore", WR, "CLE", 1.0),
    ("Cedrick Wilson Jr.", WR, "NO", 1.0),
    ("Noah Brown", WR, "WSH", 1.0),
    ("Tre Tucker", WR, "LV", 1.0),
    ("Cam Akers", RB, "HOU", 1.0),
    ("Dameon Pierce", RB, "HOU", 1.0),
    ("Ty Chandler", RB, "MIN", 1.0),
    ("Miles Sanders", RB, "CAR", 1.0),
    ("Kenneth Gainwell", RB, "PHI", 1.0),
    ("Samaje Perine", RB, "KC", 1.0),
    ("Tyler Allgeier", RB, "ATL", 1.0),
    ("Justice Hill", RB, "BAL", 1.0),
    ("Clyde Edwards-Helaire", RB, "KC", 1.0),
    ("Roschon Johnson", RB, "CHI", 1.0),
    ("D'Ernest Johnson", RB, "JAX", 1.0),
    ("Khalil Herbert", RB, "CHI", 1.0),
    ("Zach Charbonnet", RB, "SEA", 2.0),
    ("Ray Davis", RB, "BUF", 1.0),
    ("Cade Otton", TE, "TB", 1.0),
    ("Isaiah Likely", TE, "BAL", 1.0),
    ("Tucker Kraft", TE, "GB", 1.0),
    ("Jonnu Smith", TE, "MIA", 1.0),
    ("Tyler Conklin", TE, "NYJ", 1.0),
    ("Hunter Henry", TE, "NE", 1.0),
    ("Pat Freiermuth", TE, "PIT", 1.0),
    ("Noah Fant", TE, "SEA", 1.0),
    ("Mike Gesicki", TE, "CIN", 1.0),
    ("Taysom Hill", TE, "NO", 1.0),
    ("Geno Smith", QB, "SEA", 2.0),
    ("Daniel Jones", QB, "NYG", 1.0),
    ("Russell Wilson", QB, "PIT", 1.0),
    ("Justin Fields", QB, "PIT", 1.0),
    ("Sam Darnold", QB, "MIN", 1.0),
    ("Gardner Minshew", QB, "LV", 1.0),
    ("Bryce Young", QB, "CAR", 1.0),
    ("Will Levis", QB, "TEN", 1.0),
    ("Mac Jones", QB, "JAX", 1.0),
    ("Deshaun Watson", QB, "CLE", 1.0),
    ("Justin Tucker", K, "BAL", 1.0),
    ("Harrison Butker", K, "KC", 1.0),
    ("Brandon McManus", K, "GB", 1.0),
    ("Chris Boswell", K, "PIT", 1.0),
    ("Tyler Bass", K, "BUF", 1.0),
    ("Jake Moody", K, "SF", 1.0),
    ("Cowboys", DEF, "DAL", 2.0),
    ("49ers", DEF, "SF", 2.0),
    ("Ravens", DEF, "BAL", 2.0),
    ("Bills", DEF, "BUF", 2.0),
    ("Steelers", DEF, "PIT", 2.0),
    ("Eagles", DEF, "PHI", 2.0),
];

/// Look up a hand-verified ESPN id by exact player name.
pub fn known_espn_id(name: &str) -> Option<EspnId> {
    KNOWN_ESPN_IDS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, id)| EspnId::new(*id))
}

/// Headliners in draft order, followed by the depth pool at tier 4.
pub fn curated_players() -> Result<Vec<CuratedPlayer>> {
    let mut players = HEADLINERS
        .iter()
        .map(|&(name, position, team, auction, tier)| {
            Ok(CuratedPlayer::new(name, position, team, Tier::new(tier)?, auction))
        })
        .collect::<Result<Vec<_>>>()?;

    players.extend(
        DEPTH_POOL
            .iter()
            .map(|&(name, position, team, auction)| {
                CuratedPlayer::new(name, position, team, Tier::depth(), auction)
            }),
    );

    Ok(players)
}

/// The built-in board with known ESPN ids merged in.
pub fn curated_board(season: Season, limit: usize) -> Result<DraftBoard> {
    let mut board = DraftBoard::new(season, curated_players()?, limit)?;
    board.merge_ids(known_espn_id);
    Ok(board)
}
