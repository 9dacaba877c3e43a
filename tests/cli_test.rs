use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/checkout.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "order,name,email,phone,items,subtotal,shipping,total,payment",
        ))
        // 6 kg of NPK at 850 crosses the free delivery threshold
        .stdout(predicate::str::contains(
            "1,Иван Петров,ivan.petrov@mail.ru,+79991234567,6,5100,0,5100,Карта •••• 3456",
        ));

    Ok(())
}

#[test]
fn test_cli_text_format() {
    let mut cmd = Command::new(cargo_bin!("agromarket"));
    cmd.arg("tests/fixtures/checkout.csv").arg("--format").arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Заказ №1"))
        .stdout(predicate::str::contains(
            "Заказ успешно оформлен! Мы свяжемся с вами в ближайшее время.",
        ))
        .stdout(predicate::str::contains("    6 кг × 850 ₽ = 5100 ₽"))
        .stdout(predicate::str::contains("Доставка: Бесплатно"));
}

#[test]
fn test_cli_json_format() {
    let output = Command::new(cargo_bin!("agromarket"))
        .arg("tests/fixtures/checkout.csv")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let orders: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["order"], 1);
    assert_eq!(orders[0]["customer"]["payment_method"], "card");
    assert_eq!(orders[0]["lines"][0]["quantity"], 6);
}

#[test]
fn test_cli_catalog() {
    let mut cmd = Command::new(cargo_bin!("agromarket"));
    cmd.arg("--catalog");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Каталог удобрений"))
        .stdout(predicate::str::contains("[3] Калийная соль (Калийное) 720 ₽/кг | В наличии"))
        .stdout(predicate::str::contains("Нет в наличии"));
}

#[test]
fn test_cli_requires_input() {
    Command::new(cargo_bin!("agromarket"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input events file is required"));
}
