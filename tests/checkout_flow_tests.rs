use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_flat_delivery_fee_below_threshold() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action, target, value").unwrap();
    writeln!(file, "quantity, 1, 5").unwrap();
    writeln!(file, "customer, name, Иван").unwrap();
    writeln!(file, "customer, email, ivan@mail.ru").unwrap();
    writeln!(file, "customer, phone, +79991234567").unwrap();
    writeln!(file, "payment, method, cash").unwrap();
    writeln!(file, "submit,,").unwrap();

    let mut cmd = Command::new(cargo_bin!("agromarket"));
    cmd.arg(file.path());

    // 5 x 850 = 4250, plus 500 delivery
    cmd.assert().success().stdout(predicate::str::contains(
        "1,Иван,ivan@mail.ru,+79991234567,5,4250,500,4750,Наличные при получении",
    ));
}

#[test]
fn test_submit_without_cart_is_ignored() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action, target, value").unwrap();
    writeln!(file, "customer, name, Иван").unwrap();
    writeln!(file, "customer, email, ivan@mail.ru").unwrap();
    writeln!(file, "customer, phone, +79991234567").unwrap();
    writeln!(file, "payment, method, sbp").unwrap();
    writeln!(file, "submit,,").unwrap();

    let mut cmd = Command::new(cargo_bin!("agromarket"));
    cmd.arg(file.path());

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_double_submit_places_one_order() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action, target, value").unwrap();
    writeln!(file, "quantity, 2, 1").unwrap();
    writeln!(file, "customer, name, Иван").unwrap();
    writeln!(file, "customer, email, ivan@mail.ru").unwrap();
    writeln!(file, "customer, phone, +79991234567").unwrap();
    writeln!(file, "payment, method, transfer").unwrap();
    writeln!(file, "payment, bank, vtb").unwrap();
    writeln!(file, "submit,,").unwrap();
    writeln!(file, "submit,,").unwrap();

    let output = Command::new(cargo_bin!("agromarket"))
        .arg(file.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("1,Иван,ivan@mail.ru,+79991234567,1,650,500,1150,Банковский перевод (ВТБ)"));
}

#[test]
fn test_session_resets_between_orders() {
    let script = NamedTempFile::new().unwrap();
    common::generate_orders(script.path(), 3, 2).unwrap();

    let output = Command::new(cargo_bin!("agromarket"))
        .arg(script.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header plus three orders, each with only its own 2 x 650
    assert_eq!(stdout.lines().count(), 4);
    for order in 1..=3 {
        let expected = format!(
            "{order},Анна Смирнова,anna@example.com,89161234567,2,1300,500,1800,Наличные при получении"
        );
        assert!(stdout.contains(&expected), "missing order {order}: {stdout}");
    }
}

#[test]
fn test_strict_mode_rejects_short_account_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.csv");
    let mut rows = vec![["quantity", "3", "2"]];
    rows.extend(common::customer_rows("transfer"));
    rows.push(["payment", "bank", "sberbank"]);
    rows.push(["payment", "account_number", "4081781001234567890"]);
    rows.push(["submit", "", ""]);
    common::write_script(&path, &rows).unwrap();

    Command::new(cargo_bin!("agromarket"))
        .arg(&path)
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // The same script goes through with presence-only checks
    Command::new(cargo_bin!("agromarket"))
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Банковский перевод (Сбербанк)"));
}

#[test]
fn test_custom_shipping_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shipping.csv");
    let mut rows = vec![["quantity", "1", "2"]];
    rows.extend(common::customer_rows("cash"));
    rows.push(["submit", "", ""]);
    common::write_script(&path, &rows).unwrap();

    Command::new(cargo_bin!("agromarket"))
        .arg(&path)
        .args(["--free-shipping-threshold", "1000", "--shipping-fee", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains(",2,1700,0,1700,"));

    Command::new(cargo_bin!("agromarket"))
        .arg(&path)
        .args(["--free-shipping-threshold", "2000", "--shipping-fee", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains(",2,1700,300,2000,"));
}

#[test]
fn test_text_format_shows_open_cart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("open_cart.csv");
    let mut rows = vec![["quantity", "2", "1"]];
    rows.extend(common::customer_rows("cash"));
    rows.push(["submit", "", ""]);
    rows.push(["quantity", "1", "5"]);
    rows.push(["customer", "payment_method", "cash"]);
    common::write_script(&path, &rows).unwrap();

    Command::new(cargo_bin!("agromarket"))
        .arg(&path)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Заказ №1"))
        .stdout(predicate::str::contains("Итоги заказа"))
        .stdout(predicate::str::contains("Приготовьте точную сумму: 4750 ₽"))
        .stdout(predicate::str::contains("! name: Укажите ваше имя"))
        .stdout(predicate::str::contains("[Заполните все поля]"))
        .stderr(predicate::str::contains("unsubmitted cart"));
}

#[test]
fn test_text_format_without_open_cart() {
    let mut cmd = Command::new(cargo_bin!("agromarket"));
    cmd.arg("tests/fixtures/checkout.csv").args(["--format", "text"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Итоги заказа").not());
}
