mod integration {
    mod opentsdb {

        extern crate chrono;
        extern crate tsdbline;

        use self::chrono::{TimeZone, Utc};
        use self::tsdbline::protocols::opentsdb::{LineParser, OpentsdbParseConfig,
                                                  ParseMode};

        struct Expect {
            name: &'static str,
            seconds: i64,
            value: f64,
            tags: &'static [(&'static str, &'static str)],
        }

        fn telnet_parser() -> LineParser {
            LineParser::new(OpentsdbParseConfig {
                protocol_type: ParseMode::TelnetProtocol,
            })
        }

        #[test]
        fn test_telnet_api_lines() {
            let cases: Vec<(&str, Expect)> = vec![
                (
                    "(ignore me)put  mysql.bytes_received  1287333217 327810227706 schema=foo   host=db1",
                    Expect {
                        name: "mysql.bytes_received",
                        seconds: 1287333217,
                        value: 327810227706.0,
                        tags: &[("schema", "foo"), ("host", "db1")],
                    },
                ),
                (
                    "put mysql.bytes_sent 1287333217 6604859181710 schema=foo host=db1",
                    Expect {
                        name: "mysql.bytes_sent",
                        seconds: 1287333217,
                        value: 6604859181710.0,
                        tags: &[("schema", "foo"), ("host", "db1")],
                    },
                ),
                (
                    "put mysql.bytes_received 1287333232 -327812421706.2718 schema=foo host=db1",
                    Expect {
                        name: "mysql.bytes_received",
                        seconds: 1287333232,
                        value: -327812421706.2718,
                        tags: &[("schema", "foo"), ("host", "db1")],
                    },
                ),
                (
                    "!@#$%^&*()-_+=1234567890[]{}\\|put mysql.bytes_sent 1287333232 6604901075387 schema=foo host=db1",
                    Expect {
                        name: "mysql.bytes_sent",
                        seconds: 1287333232,
                        value: 6604901075387.0,
                        tags: &[("schema", "foo"), ("host", "db1")],
                    },
                ),
                (
                    "-->puttputtputput mysql.bytes_put 1287333321 340899533915 schema=put host=db2",
                    Expect {
                        name: "mysql.bytes_put",
                        seconds: 1287333321,
                        value: 340899533915.0,
                        tags: &[("schema", "put"), ("host", "db2")],
                    },
                ),
                (
                    "put mysql.bytes_sent 1287333321 5506469130707 schema=foo host=db2",
                    Expect {
                        name: "mysql.bytes_sent",
                        seconds: 1287333321,
                        value: 5506469130707.0,
                        tags: &[("schema", "foo"), ("host", "db2")],
                    },
                ),
            ];

            let parser = telnet_parser();
            for (line, expect) in cases {
                let pt = parser.parse(Some(line)).unwrap().unwrap();
                assert_eq!(pt.name, expect.name, "line: {}", line);
                assert_eq!(
                    pt.time(),
                    Utc.timestamp(expect.seconds, 0),
                    "line: {}",
                    line
                );
                assert_eq!(pt.value, expect.value, "line: {}", line);
                let tags: Vec<(&str, &str)> = pt.tags
                    .iter()
                    .map(|&(ref k, ref v)| (k.as_str(), v.as_str()))
                    .collect();
                assert_eq!(tags, expect.tags.to_vec(), "line: {}", line);
            }
        }

        #[test]
        fn test_wire_parser_accepts_telnet_lines() {
            let wire = LineParser::default();
            let telnet = telnet_parser();

            let line = "put mysql.bytes_sent 1287333217 6604859181710 schema=foo host=db1";
            assert_eq!(wire.parse(Some(line)), telnet.parse(Some(line)));
        }

        #[test]
        fn test_absent_input_yields_nothing() {
            let parser = telnet_parser();
            assert_eq!(Ok(None), parser.parse(None));
        }
    }
}
