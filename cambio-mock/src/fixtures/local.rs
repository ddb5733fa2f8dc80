use cambio_core::RawQuote;

pub fn argentina() -> Vec<RawQuote> {
    vec![
        RawQuote::new("oficial", 1020.0, 1060.0),
        RawQuote::new("blue", 1180.0, 1200.0),
        RawQuote::new("bolsa", 1165.5, 1172.3),
        RawQuote::new("contadoconliqui", 1170.0, 1178.9),
        RawQuote::new("mayorista", 1035.0, 1038.0),
        RawQuote::new("cripto", 1175.0, 1185.0),
        RawQuote::new("tarjeta", 1326.0, 1378.0),
    ]
}

pub fn bolivia() -> Vec<RawQuote> {
    vec![
        RawQuote::new("oficial", 6.86, 6.96),
        RawQuote::sell_only("binance", 13.25),
    ]
}
