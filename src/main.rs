use persian_date::PersianDate;

fn main() {
    env_logger::init();

    let persian_date = PersianDate::new("%d/%m/%Y");
    log::info!("demo format: {}", persian_date.jalali());

    for year in 1402..=1410 {
        println!("{year} {}", PersianDate::is_leap_year(year));
    }

    println!("{}", persian_date.to_persian_digits("1402/01/01 salam"));
    println!("{}", persian_date.to_latin_digits("۱۴۰۲/۰۱/۰۱ سلام"));
}
