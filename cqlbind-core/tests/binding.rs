#[cfg(test)]
mod tests {
    use cqlbind_core::{
        BindError, Bindable, BindingContext, Context, CqlWriter, GenericCqlWriter, QueryValue,
        TimeUuid, Value, token,
    };
    use time::macros::datetime;

    struct DollarWriter;
    impl CqlWriter for DollarWriter {
        fn placeholder_prefix(&self) -> char {
            '$'
        }
    }

    #[test]
    fn query_value() {
        let mut value = QueryValue::new("hello");
        assert_eq!(value.context_size(), 1);
        assert_eq!(value.context_id(), None);
        value.set_context_id(12).unwrap();
        assert_eq!(value.render().unwrap(), ":12");
        let mut context = BindingContext::new();
        value.update_context(&mut context).unwrap();
        assert_eq!(context.get_key("12"), Some(&Value::Text(Some("hello".into()))));
        assert_eq!(value.value(), &Value::Text(Some("hello".into())));
    }

    #[test]
    fn query_value_unassigned() {
        let value = QueryValue::new(1_i64);
        let error = value.render().unwrap_err();
        assert_eq!(BindError::of(&error), Some(&BindError::MissingContextId));
        let mut context = BindingContext::new();
        assert!(value.update_context(&mut context).is_err());
        assert!(context.is_empty());
    }

    #[test]
    fn context_assigns_consecutive_ids() {
        let mut context = Context::default();
        let mut first = QueryValue::new(1);
        let mut token = token!(1, 2, 3).unwrap();
        let mut since = TimeUuid::min(datetime!(2024-01-01 0:00)).unwrap();
        let mut last = QueryValue::new(true);
        assert_eq!(context.assign(&mut first).unwrap(), 0);
        assert_eq!(context.assign(&mut token).unwrap(), 1);
        assert_eq!(context.assign(&mut since).unwrap(), 4);
        assert_eq!(context.assign(&mut last).unwrap(), 5);
        assert_eq!(context.counter, 6);
        assert_eq!(token.render().unwrap(), "token(:1, :2, :3)");
        assert_eq!(since.render().unwrap(), "MinTimeUUID(:4)");
        assert_eq!(last.render().unwrap(), ":5");
    }

    #[test]
    fn context_exhausted() {
        let mut context = Context::new(u32::MAX);
        let mut token = token!(1, 2).unwrap();
        assert!(context.assign(&mut token).is_err());
        assert_eq!(token.context_id(), None);
        assert_eq!(context.counter, u32::MAX);
        let mut other = Context::default();
        other.update_from(&context);
        assert_eq!(other, context);
    }

    #[test]
    fn custom_writer() {
        let writer = DollarWriter;
        let mut context = Context::new(1);
        let mut token = token!("a", "b").unwrap();
        let mut until = TimeUuid::max(datetime!(2024-01-01 0:00 UTC)).unwrap();
        context.assign(&mut token).unwrap();
        context.assign(&mut until).unwrap();
        let mut out = String::new();
        token.write_query(&writer, &mut out).unwrap();
        out.push_str(" AND ");
        until.write_query(&writer, &mut out).unwrap();
        assert_eq!(out, "token($1, $2) AND MaxTimeUUID($3)");

        let mut out = String::new();
        until
            .write_query(&GenericCqlWriter::new(), &mut out)
            .unwrap();
        assert_eq!(out, "MaxTimeUUID(:3)");
    }

    #[test]
    fn binding_context() {
        let mut context = BindingContext::new();
        assert!(context.is_empty());
        assert_eq!(context.insert(1, 10.into()), None);
        assert_eq!(context.insert(0, "x".into()), None);
        assert_eq!(
            context.insert(1, 11.into()),
            Some(Value::Int(Some(10)))
        );
        context
            .extend(2, [Value::from(true), Value::BigInt(None)])
            .unwrap();
        assert_eq!(context.len(), 4);
        assert!(context.contains(3));
        assert_eq!(context.get(3), Some(&Value::BigInt(None)));
        let keys: Vec<_> = context.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["0", "1", "2", "3"]);
        assert_eq!(
            context.into_positional().unwrap(),
            [
                Value::Text(Some("x".into())),
                Value::Int(Some(11)),
                Value::Boolean(Some(true)),
                Value::BigInt(None),
            ]
        );
    }

    #[test]
    fn binding_context_positional_order() {
        let mut context = BindingContext::new();
        for id in (0..12).rev() {
            context.insert(id, Value::Int(Some(id as i32)));
        }
        let values = context.clone().into_positional().unwrap();
        assert_eq!(values.len(), 12);
        for (i, value) in values.into_iter().enumerate() {
            assert_eq!(value, Value::Int(Some(i as i32)));
        }
        let mut sparse = BindingContext::new();
        sparse.insert(0, 1.into());
        sparse.insert(2, 2.into());
        assert!(sparse.into_positional().is_err());
    }

    #[test]
    fn update_from() {
        let mut value = QueryValue::new(3.5);
        value.set_context_id(0).unwrap();
        let mut context = BindingContext::new();
        context.update_from(&value).unwrap();
        assert_eq!(context.get(0), Some(&Value::Double(Some(3.5))));
        let borrowed: &BindingContext = &context;
        assert_eq!(borrowed.into_iter().count(), 1);
    }

    #[test]
    fn binding_context_extend_overflow() {
        let mut context = BindingContext::new();
        let error = context
            .extend(u32::MAX, [Value::from(1), Value::from(2)])
            .unwrap_err();
        assert_eq!(
            BindError::of(&error),
            Some(&BindError::IdOverflow {
                id: u32::MAX,
                size: 2
            })
        );
        assert!(context.is_empty());
        context.extend(u32::MAX - 1, [Value::from(1)]).unwrap();
        assert_eq!(context.get(u32::MAX - 1), Some(&Value::Int(Some(1))));
        context.extend(u32::MAX, []).unwrap();
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn query_value_at_the_end_of_the_id_range() {
        let mut value = QueryValue::new(1);
        assert!(value.set_context_id(u32::MAX).is_err());
        value.set_context_id(u32::MAX - 1).unwrap();
        assert_eq!(value.render().unwrap(), ":4294967294");
    }
}
