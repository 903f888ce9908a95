//! Fixed reply texts and button labels.

pub const RANDOM_IDEA_LABEL: &str = "🎲 Рандомное свидание";
pub const ORDER_BOT_LABEL: &str = "🌟 Заказать бота";
pub const MANAGER_BUTTON_LABEL: &str = "Пиши нашему менеджеру — @hellobotstudio 👩‍💻";

/// HTML formatted.
pub const WELCOME_TEXT: &str = "🌟 <b>Привет!</b> 🌟\n\n\
Я — твой персональный бот для идеальных свиданий! 💖\n\
Знаю <b>50+ способов</b> как провести день не на диване \
и без бесконечных переписок в стиле «Куда поедем? — Не знаю, а ты?» 😏\n\n\
✨ <i>Просто нажми кнопку — и я мгновенно предложу:</i>\n\
▫️ Креативную идею для свидания\n\
▫️ Случайную вдохновляющую картинку\n\
▫️ Всё в спонтанном и романтичном формате — <i>без мозгового штурма</i>! ❤️\n\n\
---\n\
🚀 <b>P.S.</b> Мы создаём Telegram-ботов любой сложности.\n";

pub const CONTACT_TEXT: &str = "Нужен такой же бот? \
Есть вопросы или возникли проблемы? \
Хочешь поговорить по душам? Нажмите на кнопку ниже 👇";

/// HTML formatted.
pub const ORDER_TEXT: &str = "🚀 <b>P.S.</b> Мы создаём Telegram-ботов любой сложности:\n\
• От лид-магнитов до сложных систем автоматизации\n\
• Индивидуальный подход\n\
• Профессиональная реализация\n\n\
Хочешь такого же крутого бота?";

pub const SEARCHING_TEXT: &str = "🎲 Выбираем идеальное свидание...";
pub const IDEAS_EXHAUSTED_TEXT: &str = "Идеи закончились 😢";
pub const FAILURE_TEXT: &str = "Что-то пошло не так, попробуйте еще раз";

/// Caption used for an idea, with or without a picture.
pub fn idea_caption(idea_text: &str) -> String {
    format!("✨ Идея для свидания ✨\n\n{idea_text}\n\nХорошего время препровождения! ❤️")
}
