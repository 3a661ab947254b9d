//! Declarative code/label tables for each catalog domain.
//!
//! Tables keep the order in which the options are presented to a user.

/// ISO 3166 alpha-2 country codes.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("AU", "Австралия"),
    ("AT", "Австрия"),
    ("AZ", "Азербайджан"),
    ("AL", "Албания"),
    ("DZ", "Алжир"),
    ("AI", "Ангилья о. (GB)"),
    ("AO", "Ангола"),
    ("AD", "Андорра"),
    ("AQ", "Антарктика"),
    ("AG", "Антигуа и Барбуда"),
    ("AN", "Антильские о‐ва (NL)"),
    ("AR", "Аргентина"),
    ("AM", "Армения"),
    ("AW", "Аруба"),
    ("AF", "Афганистан"),
    ("BS", "Багамы"),
    ("BD", "Бангладеш"),
    ("BB", "Барбадос"),
    ("BH", "Бахрейн"),
    ("BY", "Беларусь"),
    ("BZ", "Белиз"),
    ("BE", "Бельгия"),
    ("BJ", "Бенин"),
    ("BM", "Бермуды"),
    ("BV", "Бове о. (NO)"),
    ("BG", "Болгария"),
    ("BO", "Боливия"),
    ("BA", "Босния и Герцеговина"),
    ("BW", "Ботсвана"),
    ("BR", "Бразилия"),
    ("BN", "Бруней Дарассалам"),
    ("BF", "Буркина‐Фасо"),
    ("BI", "Бурунди"),
    ("BT", "Бутан"),
    ("VU", "Вануату"),
    ("VA", "Ватикан"),
    ("GB", "Великобритания"),
    ("HU", "Венгрия"),
    ("VE", "Венесуэла"),
    ("VG", "Виргинские о‐ва (GB)"),
    ("VI", "Виргинские о‐ва (US)"),
    ("AS", "Восточное Самоа (US)"),
    ("TP", "Восточный Тимор"),
    ("VN", "Вьетнам"),
    ("GA", "Габон"),
    ("HT", "Гаити"),
    ("GY", "Гайана"),
    ("GM", "Гамбия"),
    ("GH", "Гана"),
    ("GP", "Гваделупа"),
    ("GT", "Гватемала"),
    ("GN", "Гвинея"),
    ("GW", "Гвинея‐Бисау"),
    ("DE", "Германия"),
    ("GI", "Гибралтар"),
    ("HN", "Гондурас"),
    ("HK", "Гонконг (CN)"),
    ("GD", "Гренада"),
    ("GL", "Гренландия (DK)"),
    ("GR", "Греция"),
    ("GE", "Грузия"),
    ("GU", "Гуам"),
    ("DK", "Дания"),
    ("CD", "Демократическая Республика Конго"),
    ("DJ", "Джибути"),
    ("DM", "Доминика"),
    ("DO", "Доминиканская Республика"),
    ("EG", "Египет"),
    ("ZM", "Замбия"),
    ("EH", "Западная Сахара"),
    ("ZW", "Зимбабве"),
    ("IL", "Израиль"),
    ("IN", "Индия"),
    ("ID", "Индонезия"),
    ("JO", "Иордания"),
    ("IQ", "Ирак"),
    ("IR", "Иран"),
    ("IE", "Ирландия"),
    ("IS", "Исландия"),
    ("ES", "Испания"),
    ("IT", "Италия"),
    ("YE", "Йемен"),
    ("CV", "Кабо‐Верде"),
    ("KZ", "Казахстан"),
    ("KY", "Каймановы о‐ва (GB)"),
    ("KH", "Камбоджа"),
    ("CM", "Камерун"),
    ("CA", "Канада"),
    ("QA", "Катар"),
    ("KE", "Кения"),
    ("CY", "Кипр"),
    ("KG", "Киргизстан"),
    ("KI", "Кирибати"),
    ("CN", "Китай"),
    ("CC", "Кокосовые (Киилинг) о‐ва (AU)"),
    ("CO", "Колумбия"),
    ("KM", "Коморские о‐ва"),
    ("CG", "Конго"),
    ("CR", "Коста‐Рика"),
    ("CI", "Кот‐д'Ивуар"),
    ("CU", "Куба"),
    ("KW", "Кувейт"),
    ("CK", "Кука о‐ва (NZ)"),
    ("LA", "Лаос"),
    ("LV", "Латвия"),
    ("LS", "Лесото"),
    ("LR", "Либерия"),
    ("LB", "Ливан"),
    ("LY", "Ливия"),
    ("LT", "Литва"),
    ("LI", "Лихтенштейн"),
    ("LU", "Люксембург"),
    ("MU", "Маврикий"),
    ("MR", "Мавритания"),
    ("MG", "Мадагаскар"),
    ("YT", "Майотта о. (KM)"),
    ("MO", "Макао (PT)"),
    ("MK", "Македония"),
    ("MW", "Малави"),
    ("MY", "Малайзия"),
    ("ML", "Мали"),
    ("MV", "Мальдивы"),
    ("MT", "Мальта"),
    ("MA", "Марокко"),
    ("MQ", "Мартиника"),
    ("MH", "Маршалловы о‐ва"),
    ("MX", "Мексика"),
    ("FM", "Микронезия (US)"),
    ("MZ", "Мозамбик"),
    ("MD", "Молдова"),
    ("MC", "Монако"),
    ("MN", "Монголия"),
    ("MS", "Монсеррат о. (GB)"),
    ("MM", "Мьянма"),
    ("NA", "Намибия"),
    ("NR", "Науру"),
    ("NP", "Непал"),
    ("NE", "Нигер"),
    ("NG", "Нигерия"),
    ("NL", "Нидерланды"),
    ("NI", "Никарагуа"),
    ("NU", "Ниуэ о. (NZ)"),
    ("NZ", "Новая Зеландия"),
    ("NC", "Новая Каледония о. (FR)"),
    ("NO", "Норвегия"),
    ("NF", "Норфолк о. (AU)"),
    ("AE", "Объединенные Арабские Эмираты"),
    ("OM", "Оман"),
    ("PK", "Пакистан"),
    ("PW", "Палау (US)"),
    ("PS", "Палестинская автономия"),
    ("PA", "Панама"),
    ("PG", "Папуа‐Новая Гвинея"),
    ("PY", "Парагвай"),
    ("PE", "Перу"),
    ("PN", "Питкэрн о‐ва (GB)"),
    ("PL", "Польша"),
    ("PT", "Португалия"),
    ("PR", "Пуэрто‐Рико (US)"),
    ("RE", "Реюньон о. (FR)"),
    ("CX", "Рождества о. (AU)"),
    ("RU", "Россия"),
    ("RW", "Руанда"),
    ("RO", "Румыния"),
    ("SV", "Сальвадор"),
    ("WS", "Самоа"),
    ("SM", "Сан Марино"),
    ("ST", "Сан‐Томе и Принсипи"),
    ("SA", "Саудовская Аравия"),
    ("SZ", "Свазиленд"),
    ("SJ", "Свалбард и Ян Мейен о‐ва (NO)"),
    ("SH", "Святой Елены о. (GB)"),
    ("KP", "Северная Корея (КНДР)"),
    ("MP", "Северные Марианские"),
    ("SC", "Сейшелы"),
    ("VC", "Сен‐Винсент и Гренадины"),
    ("PM", "Сен‐Пьер и Микелон (FR)"),
    ("SN", "Сенегал"),
    ("KN", "Сент‐Кристофер и Невис"),
    ("LC", "Сент‐Люсия"),
    ("SG", "Сингапур"),
    ("SY", "Сирия"),
    ("SK", "Словакия"),
    ("SI", "Словения"),
    ("US", "Соединенные Штаты Америки"),
    ("SB", "Соломоновы о‐ва"),
    ("SO", "Сомали"),
    ("SD", "Судан"),
    ("SR", "Суринам"),
    ("SL", "Сьерра‐Леоне"),
    ("TJ", "Таджикистан"),
    ("TH", "Таиланд"),
    ("TW", "Тайвань"),
    ("TZ", "Танзания"),
    ("TC", "Теркс и Кайкос о‐ва (GB)"),
    ("TG", "Того"),
    ("TK", "Токелау о‐ва (NZ)"),
    ("TO", "Тонга"),
    ("TT", "Тринидад и Тобаго"),
    ("TV", "Тувалу"),
    ("TN", "Тунис"),
    ("TM", "Туркменистан"),
    ("TR", "Турция"),
    ("UG", "Уганда"),
    ("UZ", "Узбекистан"),
    ("UA", "Украина"),
    ("WF", "Уоллис и Футунао‐ва (FR)"),
    ("UY", "Уругвай"),
    ("FO", "Фарерские о‐ва (DK)"),
    ("FJ", "Фиджи"),
    ("PH", "Филиппины"),
    ("FI", "Финляндия"),
    ("FK", "Фолклендские (Мальвинские) о‐ва (GB/AR)"),
    ("FR", "Франция"),
    ("GF", "Французская Гвиана (FR)"),
    ("PF", "Французская Полинезия"),
    ("HM", "Херд и Макдональд о‐ва (AU)"),
    ("HR", "Хорватия"),
    ("CF", "Центрально‐африканская Республика"),
    ("TD", "Чад"),
    ("CZ", "Чехия"),
    ("CL", "Чили"),
    ("CH", "Швейцария"),
    ("SE", "Швеция"),
    ("LK", "Шри‐Ланка"),
    ("EC", "Эквадор"),
    ("GQ", "Экваториальная Гвинея"),
    ("ER", "Эритрия"),
    ("EE", "Эстония"),
    ("ET", "Эфиопия"),
    ("YU", "Югославия"),
    ("ZA", "Южная Африка"),
    ("GS", "Южная Георгия и Южные Сандвичевы о‐ва"),
    ("KR", "Южная Корея (Республика Корея)"),
    ("JM", "Ямайка"),
    ("JP", "Япония"),
    ("TF", "Французские южные территории (FR)"),
    ("IO", "Британская территория Индийского океана (GB)"),
    ("UM", "Соединенные Штаты Америки Внешние малые острова (US)"),
];

/// Seniority bands.
pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("EN", "Начальный"),
    ("MI", "Средний"),
    ("SE", "Старший"),
    ("EX", "Эксперт"),
];

/// Employment arrangements.
pub const EMPLOYMENT_TYPES: &[(&str, &str)] = &[
    ("FT", "Полная занятость"),
    ("CT", "Контрактная занятость"),
    ("FL", "Фриланс"),
    ("PT", "Частичная занятость"),
];

/// Company headcount bands.
pub const COMPANY_SIZES: &[(&str, &str)] = &[
    ("S", "Маленькая компания"),
    ("M", "Средняя компания"),
    ("L", "Большая компания"),
];

/// ISO 4217 currency codes the salary may be paid in.
pub const SALARY_CURRENCIES: &[(&str, &str)] = &[
    ("EUR", "Евро"),
    ("USD", "Доллар США"),
    ("INR", "Индийская рупия"),
    ("HKD", "Гонконгский доллар"),
    ("CHF", "Швейцарский франк"),
    ("GBP", "Британский фунт"),
    ("AUD", "Австралийский доллар"),
    ("SGD", "Сингапурский доллар"),
    ("CAD", "Канадский доллар"),
    ("ILS", "Израильский шекель"),
    ("BRL", "Бразильский реал"),
    ("THB", "Таиландский бат"),
    ("PLN", "Польский злотый"),
    ("HUF", "Венгерский форинт"),
    ("CZK", "Чешская крона"),
    ("JPY", "Японская иена"),
    ("MXN", "Мексиканское песо"),
    ("TRY", "Турецкая лира"),
    ("CLP", "Чилийское песо"),
    ("DKK", "Датская крона"),
    ("PHP", "Филиппинское песо"),
    ("NOK", "Норвежская крона"),
    ("ZAR", "Южноафриканский рэнд"),
];

/// Job titles known to the trained models, sorted for presentation.
pub const JOB_TITLES: &[&str] = &[
    "AI Architect",
    "AI Developer",
    "AI Engineer",
    "AI Scientist",
    "Analytics Engineer",
    "Applied Data Scientist",
    "Applied Machine Learning Scientist",
    "Applied Scientist",
    "BI Analyst",
    "BI Data Analyst",
    "BI Developer",
    "Big Data Engineer",
    "Business Data Analyst",
    "Business Intelligence",
    "Business Intelligence Analyst",
    "Business Intelligence Developer",
    "Business Intelligence Engineer",
    "Business Intelligence Manager",
    "Cloud Database Engineer",
    "Computer Vision Engineer",
    "Data Analyst",
    "Data Analytics Lead",
    "Data Analytics Manager",
    "Data Architect",
    "Data Developer",
    "Data Engineer",
    "Data Infrastructure Engineer",
    "Data Integration Engineer",
    "Data Integration Specialist",
    "Data Lead",
    "Data Management Analyst",
    "Data Management Specialist",
    "Data Manager",
    "Data Modeler",
    "Data Operations Analyst",
    "Data Operations Engineer",
    "Data Product Manager",
    "Data Quality Analyst",
    "Data Science Consultant",
    "Data Science Engineer",
    "Data Science Lead",
    "Data Science Manager",
    "Data Science Practitioner",
    "Data Scientist",
    "Data Specialist",
    "Data Strategist",
    "Data Visualization Specialist",
    "Decision Scientist",
    "Director of Data Science",
    "ETL Developer",
    "Head of Data",
    "Head of Data Science",
    "Insight Analyst",
    "Lead Data Scientist",
    "MLOps Engineer",
    "Machine Learning Engineer",
    "Machine Learning Infrastructure Engineer",
    "Machine Learning Researcher",
    "Machine Learning Scientist",
    "Machine Learning Software Engineer",
    "NLP Engineer",
    "Principal Data Scientist",
    "Prompt Engineer",
    "Research Analyst",
    "Research Engineer",
    "Research Scientist",
    "Robotics Engineer",
];

/// Survey years present in the training data.
pub const WORK_YEARS: &[i32] = &[2020, 2021, 2022, 2023, 2024];
