//! Static site content. Everything here is display data; the only piece the
//! election widget cares about is the candidate roster.

use shared::models::{Candidate, NewsItem, Photo, Project, ValueCard};

/// News item id that deep-links to the voting page from its detail modal.
pub const ELECTION_NEWS_ID: &str = "election-announcement";

pub fn candidates() -> Vec<Candidate> {
    vec![Candidate::new(1, "Динара", "", "За лучшее будущее!")]
}

pub fn values() -> Vec<ValueCard> {
    vec![
        ValueCard {
            icon: "M13 10V3L4 14h7v7l9-11h-7z".into(),
            title: "Патриотизм и историческая память".into(),
            description: "Мы любим свою Родину, изучаем её историю и гордимся её достижениями.".into(),
        },
        ValueCard {
            icon: "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z".into(),
            title: "Добро и справедливость".into(),
            description: "Мы помогаем тем, кто нуждается в помощи, и стремимся сделать мир лучше.".into(),
        },
        ValueCard {
            icon: "M20.59 12l-3.32-3.32a.75.75 0 00-1.06 1.06L17.94 11H6.06l1.72-1.72a.75.75 0 10-1.06-1.06L3.41 12l3.32 3.32a.75.75 0 001.06-1.06L6.06 13h11.88l-1.72 1.72a.75.75 0 101.06 1.06L20.59 12z".into(),
            title: "Взаимопомощь и взаимоуважение".into(),
            description: "Мы ценим каждого, уважаем чужое мнение и всегда готовы прийти на помощь.".into(),
        },
        ValueCard {
            icon: "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z".into(),
            title: "Крепкая семья".into(),
            description: "Семья - наша главная опора. Мы ценим семейные традиции и создаем новые.".into(),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        image_url: "https://i.postimg.cc/VNMsVY8c/A4-22.png".into(),
        title: "Открыт набор в Движение".into(),
        description: "Хочешь найти друзей, реализовать свои идеи и сделать мир лучше? Присоединяйся к нам! Мы ждём самых активных, творческих и неравнодушных ребят.".into(),
    }]
}

pub fn photos() -> Vec<Photo> {
    Vec::new()
}

pub fn news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: Some(ELECTION_NEWS_ID.into()),
            date: "Важно".into(),
            title: "Скоро выборы Председателя Совета Первых!".into(),
            content: "Прими участие в жизни школы и выбери своего лидера! Голосование уже началось. Узнай больше о кандидатах и сделай свой выбор.".into(),
            image_url: Some("https://i.postimg.cc/3NgSVY5r/Group-299.png".into()),
            full_content: r#"
        <p><strong>Внимание, активисты!</strong></p>
        <p>Настало время одного из самых важных событий в жизни нашего первичного отделения — выборов Председателя Совета Первых! Это уникальная возможность для каждого из вас повлиять на будущее Движения в нашей школе.</p>
        <h3>Кто может стать Председателем?</h3>
        <p>Председатель — это не просто должность, это лидер, который будет представлять интересы всех участников, вдохновлять на новые проекты и вести команду к успеху. Кандидаты уже представили свои программы и готовы к работе.</p>
        <h3>Почему важно голосовать?</h3>
        <ul>
          <li>Ваш голос определяет, кто будет направлять нашу деятельность в следующем году.</li>
          <li>Это проявление вашей активной гражданской позиции.</li>
          <li>Вместе мы выбираем лучшее будущее для нашего отделения!</li>
        </ul>
        <p>Ознакомьтесь с кандидатами, их идеями и слоганами. Ваш выбор имеет значение! Нажмите на кнопку ниже, чтобы перейти на страницу голосования и поддержать своего кандидата.</p>
      "#.into(),
        },
        NewsItem {
            id: None,
            date: "Актуально".into(),
            title: "Ведётся активный набор в Движение!".into(),
            content: "Хочешь найти друзей, реализовать свои идеи и сделать мир лучше? Стань частью нашей команды! Узнай больше, кликнув на эту новость.".into(),
            image_url: Some("https://i.postimg.cc/VNMsVY8c/A4-22.png".into()),
            full_content: r#"
        <p><strong>Мы рады объявить, что первичное отделение «Движения Первых» в нашей школе открывает набор новых участников!</strong></p>
        <p>Если ты активен, полон идей, хочешь менять мир к лучшему и найти настоящих друзей — мы ждём именно тебя. «Движение Первых» — это не просто организация, это большая дружная семья, где каждый может найти себе занятие по душе и раскрыть свои таланты.</p>
        <h3>Что тебя ждёт?</h3>
        <ul>
          <li>Участие в крутых проектах и мероприятиях на уровне школы, города и даже страны.</li>
          <li>Возможность реализовать собственные социальные, творческие и волонтёрские инициативы.</li>
          <li>Новые знакомства, работа в команде и развитие лидерских качеств.</li>
          <li>Поддержка твоих идей и помощь в их воплощении.</li>
        </ul>
        <h3>Кто может присоединиться?</h3>
        <p>Мы приглашаем всех учеников нашей школы, которые хотят быть в центре событий, готовы действовать и быть первыми во всём!</p>
        <h3>Как стать частью команды?</h3>
        <p>Это очень просто! Обратись к руководителю нашего первичного отделения в школе или заполни заявку на официальном сайте <a href="https://будьвдвижении.рф" target="_blank" rel="noopener noreferrer">будьвдвижении.рф</a>. Подробности можно узнать в разделе «Как вступить» на нашем сайте.</p>
        <p><strong>Не упускай свой шанс! Присоединяйся к нам и давай вместе делать мир лучше!</strong></p>
      "#.into(),
        },
    ]
}
