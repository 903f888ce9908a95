//! Built-in date ideas loaded into an empty database on startup.

/// One seed row. Image paths are relative to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedIdea {
    pub text: &'static str,
    pub image_path: Option<&'static str>,
}

impl SeedIdea {
    pub const fn new(text: &'static str, image_path: Option<&'static str>) -> Self {
        Self { text, image_path }
    }
}

/// Bumped whenever `DEFAULT_IDEAS` changes. Only informational, an already
/// seeded database is never reseeded.
pub const SEED_VERSION: u32 = 1;

pub const DEFAULT_IDEAS: &[SeedIdea] = &[
    SeedIdea::new(
        "Пикник в парке: плед, термос с какао и любимые бутерброды.",
        Some("images/picnic.jpg"),
    ),
    SeedIdea::new(
        "Ночная прогулка по городу с остановками в круглосуточных кофейнях.",
        Some("images/night_walk.jpg"),
    ),
    SeedIdea::new(
        "Мастер-класс по гончарному делу: слепите друг другу по кружке.",
        Some("images/pottery.jpg"),
    ),
    SeedIdea::new(
        "Кулинарный вечер дома: выберите кухню незнакомой страны и готовьте вместе.",
        Some("images/cooking.jpg"),
    ),
    SeedIdea::new(
        "Поход в планетарий, а после него поиск созвездий на крыше.",
        Some("images/planetarium.jpg"),
    ),
    SeedIdea::new(
        "Катание на велосипедах по набережной до самого заката.",
        Some("images/bikes.jpg"),
    ),
    SeedIdea::new(
        "Квест-комната на двоих: проверьте, как вы работаете в команде.",
        Some("images/quest.jpg"),
    ),
    SeedIdea::new(
        "Вечер настольных игр с проигравшим, который готовит завтрак.",
        None,
    ),
    SeedIdea::new(
        "Фотопрогулка: снимите город глазами друг друга и сравните кадры.",
        Some("images/photo_walk.jpg"),
    ),
    SeedIdea::new(
        "Каток в центре города и горячий глинтвейн после.",
        Some("images/ice_rink.jpg"),
    ),
    SeedIdea::new(
        "Караоке-баттл: каждый выбирает песню для другого.",
        None,
    ),
    SeedIdea::new(
        "Поездка на электричке в ближайший маленький город без плана.",
        Some("images/train.jpg"),
    ),
    SeedIdea::new(
        "Домашний кинофестиваль: три фильма одного режиссёра и попкорн.",
        Some("images/movie_night.jpg"),
    ),
    SeedIdea::new(
        "Рассвет на смотровой площадке с термосом кофе.",
        Some("images/sunrise.jpg"),
    ),
    SeedIdea::new(
        "Посещение блошиного рынка: купите друг другу подарок до 500 рублей.",
        None,
    ),
    SeedIdea::new(
        "Урок танцев для начинающих: сальса или бачата.",
        Some("images/dance.jpg"),
    ),
    SeedIdea::new(
        "Прогулка на лодке или катамаране по озеру.",
        Some("images/boat.jpg"),
    ),
    SeedIdea::new(
        "Дегустация чая в чайной с церемонией.",
        None,
    ),
    SeedIdea::new(
        "Вечер в музее с ночной экскурсией.",
        Some("images/museum.jpg"),
    ),
    SeedIdea::new(
        "Напишите друг другу письма и спрячьте их в капсулу времени на год.",
        None,
    ),
];
